//! 유니코드 한글 음절 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나당 음절 수 (21 × 28 = 588)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 완성형 음절 하나를 이루는 초성/중성/종성 인덱스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HangulBlock {
    /// 초성 인덱스 (0~18)
    pub choseong: u32,
    /// 중성 인덱스 (0~20)
    pub jungseong: u32,
    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub jongseong: u32,
}

impl HangulBlock {
    pub fn new(choseong: u32, jungseong: u32, jongseong: u32) -> Self {
        Self {
            choseong,
            jungseong,
            jongseong,
        }
    }

    /// 인덱스 범위를 벗어나면 None
    pub fn to_char(self) -> Option<char> {
        compose_syllable(self.choseong, self.jungseong, self.jongseong)
    }

    /// 완성형 한글이 아니면 None
    pub fn from_char(c: char) -> Option<Self> {
        decompose_syllable(c).map(|(cho, jung, jong)| Self::new(cho, jung, jong))
    }
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
///
/// `초성 × 588 + 중성 × 28 + 종성 + 0xAC00`
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + choseong * SYLLABLES_PER_CHOSEONG
        + jungseong * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    let last = HANGUL_SYLLABLE_BASE + CHOSEONG_COUNT * SYLLABLES_PER_CHOSEONG - 1;
    if !(HANGUL_SYLLABLE_BASE..=last).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / SYLLABLES_PER_CHOSEONG;
    Some((choseong, jungseong, jongseong))
}
