//! ライトボックスの選択状態
//!
//! ビューアは `toggler` の値が変わるたびに `slide`（1始まり）で開き直す。
//! 同じ写真を続けてクリックしても開くように、選択のたびに toggler を反転させる。

/// 選択中のインデックスとトグル信号
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightboxSelection {
    /// グリッド上の位置（0始まり）
    pub index: usize,
    pub toggler: bool,
}

impl LightboxSelection {
    /// 写真をクリックした時の処理。ビューアのスライド番号を返す
    pub fn activate(&mut self, index: usize) -> usize {
        self.index = index;
        self.toggler = !self.toggler;
        self.slide()
    }

    /// ビューア側のスライド番号（1始まり）
    pub fn slide(&self) -> usize {
        self.index + 1
    }

    pub fn request(&self, source_count: usize) -> ViewerRequest {
        ViewerRequest {
            toggler: self.toggler,
            slide: self.slide(),
            source_count,
        }
    }
}

/// ビューアに渡す内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerRequest {
    pub toggler: bool,
    pub slide: usize,
    pub source_count: usize,
}

impl ViewerRequest {
    /// 開く位置。ソース数を超えていれば末尾
    pub fn start_slide(&self) -> usize {
        self.slide.min(self.source_count.max(1))
    }
}

/// 次のスライド（末尾からは先頭へ）
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        return 1;
    }
    if current >= len {
        1
    } else {
        current + 1
    }
}

/// 前のスライド（先頭からは末尾へ）
pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        return 1;
    }
    if current <= 1 || current > len {
        len
    } else {
        current - 1
    }
}
