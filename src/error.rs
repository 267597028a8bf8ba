use thiserror::Error;

/// wpp 統一エラー型
#[derive(Debug, Error)]
pub enum WppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// サーバーが応答したうえでインストールを拒否した。
    /// メッセージはサーバー提供のもの、なければ汎用フォールバック。
    #[error("{0}")]
    InstallRejected(String),

    /// success 応答に必須フィールドが欠けていた（閉じて失敗させる）
    #[error("Malformed install response: {0}")]
    MalformedResponse(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Plugin not found in catalog: {0}")]
    PluginNotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WppError>;

impl WppError {
    /// トランスポート系のエラーかどうか
    ///
    /// ネットワーク障害・非JSON応答・不正な success 応答はすべてこの分類。
    /// 呼び出し側への見せ方は InstallRejected と同じ（通知＋ログ、リトライなし）。
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WppError::Network(_) | WppError::MalformedResponse(_) | WppError::Json(_)
        )
    }
}
