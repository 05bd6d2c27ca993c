/// Default REST root of the Client Portal gateway
pub const DEFAULT_GATEWAY_URL: &str = "https://ibgw:5000/v1";
/// Default name of the task queue, used to tag worker logs
pub const DEFAULT_QUEUE_NAME: &str = "ibc";
/// Default number of queue workers
pub const DEFAULT_QUEUE_WORKERS: usize = 4;
/// Default capacity of the queue channel before `submit` waits
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Brokerage accounts listing. Failed responses on this path are still
/// returned to the caller because the gateway puts useful content in them.
pub const ACCOUNTS_ENDPOINT: &str = "/api/iserver/accounts";
/// Portfolio accounts listing, required by the gateway before any other
/// `/portfolio` call in the session
pub const PORTFOLIO_ACCOUNTS_ENDPOINT: &str = "/api/portfolio/accounts";

/// Message placed in the synthetic envelope for successful empty responses
pub const SUCCESS_MESSAGE: &str = "response successful";

/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Browser user agents rotated per request. The gateway's TLS frontend
/// treats unknown agents less favourably than desktop browsers.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.5; rv:128.0) Gecko/20100101 Firefox/128.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:126.0) Gecko/20100101 Firefox/126.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
];

/// Default currency for transaction history
pub const DEFAULT_CURRENCY: &str = "USD";
/// Default number of days for transaction history
pub const DEFAULT_TRANSACTION_DAYS: u32 = 90;
