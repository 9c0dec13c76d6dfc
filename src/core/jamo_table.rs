//! 두벌식 자판 영문 키 -> 자모 인덱스 테이블
//!
//! 배열 순서가 곧 자모 인덱스이며, 음절 코드 계산식의 항으로 그대로 쓰입니다.

use lazy_static::lazy_static;
use std::collections::HashMap;

// 초성 인덱스 순서 (19개):
// ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
// ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
#[rustfmt::skip]
const INITIAL_KEYS: [&str; 19] = [
    "r", "R", "s", "e", "E", "f", "a", "q", "Q", "t",
    "T", "d", "w", "W", "c", "z", "x", "v", "g",
];

// 중성 인덱스 순서 (21개):
// ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
// ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
#[rustfmt::skip]
const VOWEL_KEYS: [&str; 21] = [
    "k", "o", "i", "O", "j", "p", "u", "P", "h", "hk",
    "ho", "hl", "y", "n", "nj", "np", "nl", "b", "m", "ml",
    "l",
];

// 종성 인덱스 순서 (28개, 0 = 없음):
// 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
// ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
// ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)
#[rustfmt::skip]
const FINAL_KEYS: [&str; 28] = [
    "", "r", "R", "rt", "s", "sw", "sg", "e", "f", "fr",
    "fa", "fq", "ft", "fx", "fv", "fg", "a", "q", "qt", "t",
    "T", "d", "w", "c", "z", "x", "v", "g",
];

/// 자모 테이블 매칭 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TailMatch {
    /// 테이블 내 인덱스
    pub index: u32,
    /// 소비한 문자 수 (1 또는 2)
    pub len: usize,
}

/// 순서가 고정된 자모 철자 테이블
#[derive(Debug)]
pub struct JamoTable {
    name: &'static str,
    entries: &'static [&'static str],
    index: HashMap<&'static str, u32>,
}

impl JamoTable {
    fn new(name: &'static str, entries: &'static [&'static str]) -> Self {
        // 빈 철자(종성 없음)는 어떤 입력과도 매칭되지 않음
        let index = entries
            .iter()
            .enumerate()
            .filter(|(_, key)| !key.is_empty())
            .map(|(i, key)| (*key, i as u32))
            .collect();
        Self {
            name,
            entries,
            index,
        }
    }

    /// 테이블 이름 (초성/중성/종성)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 인덱스 슬롯 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 슬롯이 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 인덱스에 해당하는 영문 키 철자
    pub fn key(&self, index: u32) -> Option<&'static str> {
        self.entries.get(index as usize).copied()
    }

    /// 철자가 테이블에 있으면 인덱스 반환
    pub fn lookup(&self, spelling: &str) -> Option<u32> {
        self.index.get(spelling).copied()
    }

    /// 문자열 끝에서 `len`개 문자만 정확히 비교
    /// 남은 문자가 `len`보다 적으면 매칭하지 않음
    pub fn match_exact_tail(&self, chars: &[char], len: usize) -> Option<TailMatch> {
        if len == 0 || chars.len() < len {
            return None;
        }
        let candidate: String = chars[chars.len() - len..].iter().collect();
        self.lookup(&candidate).map(|index| TailMatch { index, len })
    }

    /// 끝 두 글자를 먼저, 실패하면 끝 한 글자를 매칭
    ///
    /// 두 글자 조합이 우선하므로 `"qt"`는 ㅅ(`"t"`)이 아니라 ㅄ으로 읽힙니다.
    pub fn match_tail(&self, chars: &[char]) -> Option<TailMatch> {
        self.match_exact_tail(chars, 2)
            .or_else(|| self.match_exact_tail(chars, 1))
    }
}

lazy_static! {
    /// 초성 테이블 (19개, 모두 한 글자)
    pub static ref INITIAL_CONSONANTS: JamoTable = JamoTable::new("초성", &INITIAL_KEYS);
    /// 중성 테이블 (21개, 복합 모음은 두 글자)
    pub static ref VOWELS: JamoTable = JamoTable::new("중성", &VOWEL_KEYS);
    /// 종성 테이블 (28개, 0번은 종성 없음)
    pub static ref FINAL_CONSONANTS: JamoTable = JamoTable::new("종성", &FINAL_KEYS);
}
