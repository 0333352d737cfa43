//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

/// エラー種別の列挙体
///
/// API が返しうるエラー分類を定義します。
/// 各バリアントは 1 つの HTTP ステータスコードに対応します。
///
/// ## Notes
/// * `NotImplemented` - 未実装エンドポイント用。既存クライアントとの互換性のため
///   501 ではなく 404 を返します。
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストが不正（欠落・型違い・解析不能）
    BadRequest,
    /// 403 - Forbidden: 認証情報の不一致、または操作対象が存在しない
    Forbidden,
    /// 404 - Not Found: リソースが見つからない（ルート不一致を含む）
    NotFound,
    /// 405 - Method Not Allowed: ルートは存在するがメソッドが異なる
    MethodNotAllowed,
    /// 409 - Conflict: 一意制約と競合
    Conflict,
    /// 500 - Internal Server Error: ストア・ハッシュ処理の失敗
    InternalServerError,
    /// 404 - 未実装のエンドポイント
    NotImplemented,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::NotImplemented.status_code(), 404);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::MethodNotAllowed => 405,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
            ErrorKind::NotImplemented => 404,
        }
    }

    /// ユーザー向けの文字列表現を取得
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::MethodNotAllowed => "Method Not Allowed",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::NotImplemented => "Not Implemented",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
