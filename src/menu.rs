//! 컨텍스트 메뉴 모델
//!
//! 상위 항목 아래에 결과 항목 하나가 있고, 변환 결과는 결과 항목의 제목으로 표시됩니다.

use crate::config::AppConfig;
use crate::selection::ResultDisplay;

/// 상위 메뉴 항목 ID
pub const PARENT_ITEM_ID: &str = "gibberishToHangul";
/// 결과 메뉴 항목 ID
pub const RESULT_ITEM_ID: &str = "gibberishToHangulResult";

/// 메뉴 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub parent_id: Option<&'static str>,
    pub title: String,
}

/// 변환 메뉴 (상위 항목 + 결과 항목)
#[derive(Debug, Clone)]
pub struct ContextMenu {
    parent: MenuItem,
    result: MenuItem,
}

impl ContextMenu {
    /// 설정의 제목으로 메뉴 생성
    pub fn new(config: &AppConfig) -> Self {
        Self {
            parent: MenuItem {
                id: PARENT_ITEM_ID,
                parent_id: None,
                title: config.menu_title.clone(),
            },
            result: MenuItem {
                id: RESULT_ITEM_ID,
                parent_id: Some(PARENT_ITEM_ID),
                title: config.placeholder_title.clone(),
            },
        }
    }

    /// 등록 순서대로 항목 반환 (상위 항목 먼저)
    pub fn items(&self) -> [&MenuItem; 2] {
        [&self.parent, &self.result]
    }

    /// 결과 항목 제목
    pub fn result_title(&self) -> &str {
        &self.result.title
    }
}

impl Default for ContextMenu {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl ResultDisplay for ContextMenu {
    fn show(&mut self, text: &str) {
        log::debug!("{} 제목 갱신: {}", self.result.id, text);
        self.result.title = text.to_string();
    }
}
