//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// 컨텍스트 메뉴 상위 항목 제목
    #[serde(default = "default_menu_title")]
    pub menu_title: String,
    /// 결과 항목의 초기 제목 (변환 전)
    #[serde(default = "default_placeholder_title")]
    pub placeholder_title: String,
    /// 변환 전에 선택 영역 앞뒤 공백 제거
    #[serde(default)]
    pub trim_selection: bool,
}

fn default_menu_title() -> String {
    "Translate gibberish to Hangul".to_string()
}

fn default_placeholder_title() -> String {
    "Results will show here".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            menu_title: default_menu_title(),
            placeholder_title: default_placeholder_title(),
            trim_selection: false,
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/gibberish-hangul/config.json
pub fn config_path() -> PathBuf {
    let absolute_dir = |var: &str| {
        std::env::var(var)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    base.join("gibberish-hangul").join("config.json")
}

/// JSON 문자열에서 설정 파싱
pub fn parse_config(content: &str) -> Result<AppConfig, String> {
    serde_json::from_str(content).map_err(|e| format!("설정 파싱 실패: {}", e))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("{} ({}), 기본값 사용", e, path.display());
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &AppConfig) -> Result<(), String> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장, 상위 디렉토리가 없으면 생성
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("{} 생성 실패: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(path, json).map_err(|e| format!("{} 저장 실패: {}", path.display(), e))
}
