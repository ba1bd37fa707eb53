use strum_macros::Display;

pub(crate) trait JSONBodyHTTPResponseType: HTTPResponseType {
    async fn parse_json_body(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>
    where Self::ParsedResponseType: for<'de> serde::Deserialize<'de> {
        Ok(response.json::<Self::ParsedResponseType>().await?)
    }
}

pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> JSONBodyHTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    type ParsedResponseType = T;

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        let resp = Self::unwrap_return_code(response).await?;
        Self::parse_json_body(resp).await
    }
}

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;

    async fn unwrap_return_code(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ResponseError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.is_server_error() {
            Err(ResponseError::InternalServer(read_detail(response).await))
        } else if status.is_client_error() {
            Err(ResponseError::BadRequest(read_detail(response).await))
        } else {
            Err(ResponseError::Unknown)
        }
    }
}

/// Pulls the bridge's error message out of a failed response, falling back to
/// the raw body when it is not the usual `{"detail": ...}` object.
async fn read_detail(response: reqwest::Response) -> BadRequestReturn {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str(&text).unwrap_or_else(|_| BadRequestReturn::new(text))
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct BadRequestReturn {
    #[serde(default)]
    detail: String,
}

impl BadRequestReturn {
    pub fn new(detail: impl Into<String>) -> Self { Self { detail: detail.into() } }
    pub fn detail(&self) -> &str { &self.detail }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    InternalServer(BadRequestReturn),
    BadRequest(BadRequestReturn),
    Malformed,
    NoConnection,
    Unknown,
}

impl ResponseError {
    /// Message reported by the bridge, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ResponseError::InternalServer(ret) | ResponseError::BadRequest(ret) => Some(ret.detail()),
            _ => None,
        }
    }
}

impl std::error::Error for ResponseError {}
impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            ResponseError::Malformed
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else {
            ResponseError::Unknown
        }
    }
}
