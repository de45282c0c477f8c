#[derive(Debug, Clone)]
pub struct ReqwestExchange {
    pub(crate) client: reqwest::Client,
}
