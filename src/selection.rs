//! 선택 영역 공급자 / 결과 표시 경계
//!
//! 선택 영역을 어떻게 얻는지, 결과를 어디에 보여주는지는 호출 측이 정합니다.

use crate::config::AppConfig;
use crate::core::decoder::decode;

/// 현재 선택된 텍스트를 공급
pub trait SelectionProvider {
    /// 선택 영역이 없으면 None
    fn selection(&mut self) -> Option<String>;
}

/// 변환 결과(또는 실패 문구)를 표시
pub trait ResultDisplay {
    fn show(&mut self, text: &str);
}

/// `relay` 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// 변환 결과를 표시함
    Shown,
    /// 빈 선택 영역이라 표시를 갱신하지 않음
    Skipped,
    /// 공급자에 더 이상 선택 영역이 없음
    Exhausted,
}

/// 선택 영역 하나를 읽어 변환 후 표시
///
/// 선택 영역이 비어 있으면 표시를 갱신하지 않음
pub fn relay<P, D>(provider: &mut P, display: &mut D, config: &AppConfig) -> RelayOutcome
where
    P: SelectionProvider + ?Sized,
    D: ResultDisplay + ?Sized,
{
    let Some(selection) = provider.selection() else {
        return RelayOutcome::Exhausted;
    };
    let text = if config.trim_selection {
        selection.trim()
    } else {
        selection.as_str()
    };
    if text.is_empty() {
        log::trace!("빈 선택 영역 무시");
        return RelayOutcome::Skipped;
    }
    display.show(&decode(text));
    RelayOutcome::Shown
}

/// 고정된 문자열 목록을 차례로 공급 (CLI 인자 등)
#[derive(Debug, Default)]
pub struct QueuedSelections {
    items: std::collections::VecDeque<String>,
}

impl QueuedSelections {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SelectionProvider for QueuedSelections {
    fn selection(&mut self) -> Option<String> {
        self.items.pop_front()
    }
}
