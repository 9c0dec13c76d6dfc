//! 영문 자판 입력 -> 한글 음절 역조합
//!
//! 문자열 끝에서부터 종성(선택), 중성, 초성 순으로 떼어내며 음절을 만듭니다.
//! 한 음절이라도 읽지 못하면 전체가 무효입니다.

use super::jamo_table::{FINAL_CONSONANTS, INITIAL_CONSONANTS, VOWELS};
use super::unicode::HangulBlock;

/// 변환 실패 시 돌려주는 고정 문구
pub const INVALID_SELECTION: &str = "Invalid selection.";

/// 역조합 실패 원인
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// 중성 자리에서 모음 키를 찾지 못함 (position: 문자 오프셋)
    UnrecognizedVowel { position: usize },
    /// 초성 자리에서 자음 키를 찾지 못함 (position: 문자 오프셋)
    UnrecognizedInitialConsonant { position: usize },
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::UnrecognizedVowel { position } => {
                write!(f, "{}번째 문자에서 중성을 찾을 수 없음", position)
            }
            DecodeError::UnrecognizedInitialConsonant { position } => {
                write!(f, "{}번째 문자에서 초성을 찾을 수 없음", position)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// 영문 키 시퀀스를 한글 음절 문자열로 역조합
///
/// # Examples
/// ```
/// use gibberish_hangul::try_decode;
/// assert_eq!(try_decode("dlwlrma").unwrap(), "이지금");
/// assert!(try_decode("12345###").is_err());
/// ```
pub fn try_decode(input: &str) -> Result<String, DecodeError> {
    let chars: Vec<char> = input.chars().collect();
    let mut blocks: Vec<char> = Vec::with_capacity(chars.len() / 2 + 1);
    let mut end = chars.len();

    while end > 0 {
        // 종성은 없어도 됨 (0번 인덱스)
        let jongseong = match FINAL_CONSONANTS.match_tail(&chars[..end]) {
            Some(m) => {
                end -= m.len;
                m.index
            }
            None => 0,
        };

        // 종성을 먹은 뒤 모음이 없어도 되돌아가지 않음
        let vowel = VOWELS
            .match_tail(&chars[..end])
            .ok_or(DecodeError::UnrecognizedVowel {
                position: end.saturating_sub(1),
            })?;
        end -= vowel.len;

        let choseong = INITIAL_CONSONANTS
            .match_exact_tail(&chars[..end], 1)
            .ok_or(DecodeError::UnrecognizedInitialConsonant {
                position: end.saturating_sub(1),
            })?;
        end -= choseong.len;

        // 테이블 인덱스는 항상 음절 범위 안
        if let Some(block) = HangulBlock::new(choseong.index, vowel.index, jongseong).to_char() {
            blocks.push(block);
        }
    }

    // 뒤에서부터 모았으므로 뒤집어서 읽는 순서로
    Ok(blocks.into_iter().rev().collect())
}

/// 영문 키 시퀀스를 한글로 변환, 실패하면 `"Invalid selection."`
pub fn decode(input: &str) -> String {
    match try_decode(input) {
        Ok(hangul) => hangul,
        Err(e) => {
            log::debug!("변환 실패 ({:?}): {}", input, e);
            INVALID_SELECTION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(decode(""), "");
        assert_eq!(try_decode(""), Ok(String::new()));
    }

    #[test]
    fn test_basic_conversion() {
        assert_eq!(decode("dlwlrma"), "이지금");
        assert_eq!(decode("rkskek"), "가나다");
        assert_eq!(decode("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(decode("gksrmf"), "한글");
        assert_eq!(decode("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(decode("dhksfy"), "완료");
        assert_eq!(decode("dmlwk"), "의자");
    }

    #[test]
    fn test_complex_jongseong() {
        assert_eq!(decode("dlfr"), "읽");
        assert_eq!(decode("rkqt"), "값");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(decode("Tks"), "싼");
        assert_eq!(decode("Rk"), "까");
    }

    #[test]
    fn test_invalid_selection() {
        assert_eq!(decode("12345###"), INVALID_SELECTION);
        assert_eq!(decode("rk sk"), INVALID_SELECTION);
        assert_eq!(decode("hello"), INVALID_SELECTION);
    }

    #[test]
    fn test_missing_vowel() {
        assert_eq!(
            try_decode("rr"),
            Err(DecodeError::UnrecognizedVowel { position: 0 })
        );
        // 종성만 있고 남은 문자가 없음
        assert_eq!(
            try_decode("r"),
            Err(DecodeError::UnrecognizedVowel { position: 0 })
        );
    }

    #[test]
    fn test_missing_initial_consonant() {
        // 모음만 있음
        assert_eq!(
            try_decode("k"),
            Err(DecodeError::UnrecognizedInitialConsonant { position: 0 })
        );
        // "hk" 앞의 '1'은 초성이 아님
        assert_eq!(
            try_decode("rk1hk"),
            Err(DecodeError::UnrecognizedInitialConsonant { position: 2 })
        );
    }

    #[test]
    fn test_no_backtracking_after_final() {
        // 끝의 'r'을 종성으로 먹으면 "rkr"에 모음이 없으므로 전체 실패
        assert_eq!(
            try_decode("rkrr"),
            Err(DecodeError::UnrecognizedVowel { position: 2 })
        );
    }

    #[test]
    fn test_no_partial_result() {
        // 앞부분이 읽히지 않으면 뒷부분도 버림
        assert_eq!(decode("##rk"), INVALID_SELECTION);
        assert_eq!(decode("rk##"), INVALID_SELECTION);
    }

    #[test]
    fn test_non_ascii_input() {
        assert_eq!(decode("한글"), INVALID_SELECTION);
        assert_eq!(decode("rk가"), INVALID_SELECTION);
    }

    #[test]
    fn test_one_block_per_syllable() {
        // 음절마다 정확히 한 글자씩 출력
        let decoded = try_decode("gksrmfdmlrkqt").unwrap();
        assert_eq!(decoded, "한글의값");
        assert_eq!(decoded.chars().count(), 4);
    }

    #[test]
    fn test_error_display() {
        let err = DecodeError::UnrecognizedVowel { position: 3 };
        assert!(err.to_string().contains("중성"));
        let err = DecodeError::UnrecognizedInitialConsonant { position: 0 };
        assert!(err.to_string().contains("초성"));
    }
}
