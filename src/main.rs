//! gibberish-hangul - 영문 자판으로 잘못 입력한 한글 복원
//!
//! 인자가 있으면 각 인자를, 없으면 표준 입력의 각 줄을 변환해 한 줄씩 출력합니다.

use gibberish_hangul::config::{load_config, AppConfig};
use gibberish_hangul::selection::{
    relay, QueuedSelections, RelayOutcome, ResultDisplay, SelectionProvider,
};
use std::io::{self, BufRead, Write};

/// 표준 입력의 각 줄을 선택 영역으로 공급
struct LineSelections<R> {
    reader: R,
}

impl<R: BufRead> SelectionProvider for LineSelections<R> {
    fn selection(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                // 줄바꿈은 선택 영역의 일부가 아님
                let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
                line.truncate(trimmed_len);
                Some(line)
            }
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                None
            }
        }
    }
}

/// 결과를 표준 출력에 한 줄씩 출력
struct StdoutDisplay<W> {
    out: W,
}

impl<W: Write> ResultDisplay for StdoutDisplay<W> {
    fn show(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            log::warn!("출력 실패: {}", e);
        }
    }
}

/// 공급자가 빌 때까지 변환, 입력 한 줄마다 결과 한 줄
///
/// 빈 선택 영역도 빈 줄로 출력해 입력과 출력의 줄 수를 맞춤
fn run<P, W>(provider: &mut P, display: &mut StdoutDisplay<W>, config: &AppConfig)
where
    P: SelectionProvider + ?Sized,
    W: Write,
{
    loop {
        match relay(provider, display, config) {
            RelayOutcome::Shown => {}
            RelayOutcome::Skipped => display.show(""),
            RelayOutcome::Exhausted => break,
        }
    }
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // 설정 로드
    let config = load_config();

    let stdout = io::stdout();
    let mut display = StdoutDisplay {
        out: stdout.lock(),
    };

    let args = QueuedSelections::new(std::env::args().skip(1));
    let mut provider: Box<dyn SelectionProvider> = if args.is_empty() {
        Box::new(LineSelections {
            reader: io::stdin().lock(),
        })
    } else {
        Box::new(args)
    };

    run(provider.as_mut(), &mut display, &config);

    if let Err(e) = display.out.flush() {
        log::warn!("출력 실패: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gibberish_hangul::INVALID_SELECTION;
    use std::io::Cursor;

    fn run_lines(input: &str, config: &AppConfig) -> String {
        let mut provider = LineSelections {
            reader: Cursor::new(input.as_bytes().to_vec()),
        };
        let mut display = StdoutDisplay { out: Vec::new() };
        run(&mut provider, &mut display, config);
        String::from_utf8(display.out).unwrap()
    }

    #[test]
    fn test_line_selections_strip_newline() {
        let mut provider = LineSelections {
            reader: Cursor::new(b"rk\r\nsk\n\ngksrmf".to_vec()),
        };
        assert_eq!(provider.selection().as_deref(), Some("rk"));
        assert_eq!(provider.selection().as_deref(), Some("sk"));
        assert_eq!(provider.selection().as_deref(), Some(""));
        // 마지막 줄은 줄바꿈 없이 끝남
        assert_eq!(provider.selection().as_deref(), Some("gksrmf"));
        assert_eq!(provider.selection(), None);
    }

    #[test]
    fn test_stdout_display_one_line_per_result() {
        let mut display = StdoutDisplay { out: Vec::new() };
        display.show("가");
        display.show("");
        assert_eq!(String::from_utf8(display.out).unwrap(), "가\n\n");
    }

    #[test]
    fn test_run_keeps_line_alignment() {
        // 빈 줄도 빈 줄로 출력
        let output = run_lines("rk\n\nsk\n", &AppConfig::default());
        assert_eq!(output, "가\n\n나\n");
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_run_invalid_line() {
        let output = run_lines("dlwlrma\n###\n", &AppConfig::default());
        assert_eq!(output, format!("이지금\n{}\n", INVALID_SELECTION));
    }

    #[test]
    fn test_run_queued_arguments() {
        let mut provider = QueuedSelections::new(["rk", "", "sk"]);
        let mut display = StdoutDisplay { out: Vec::new() };
        run(&mut provider, &mut display, &AppConfig::default());
        assert_eq!(String::from_utf8(display.out).unwrap(), "가\n\n나\n");
    }

    #[test]
    fn test_run_trimmed_blank_line() {
        let config = AppConfig {
            trim_selection: true,
            ..AppConfig::default()
        };
        assert_eq!(run_lines("  \n gksrmf \n", &config), "\n한글\n");
    }
}
