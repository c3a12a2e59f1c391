/// Default ticker set served when a quotes request names none
pub const DEFAULT_TICKERS: &str = "SBER,GAZP,LKOH,YNDX";
/// Default ticker for history requests that name none
pub const DEFAULT_HISTORY_TICKER: &str = "YNDX";
/// Default size of the history window in days
pub const DEFAULT_HISTORY_DAYS: i64 = 30;
/// Maximum number of entries returned by a security search
pub const SEARCH_RESULT_CAP: usize = 20;
/// Base URL of the MOEX ISS API
pub const DEFAULT_ISS_BASE_URL: &str = "https://iss.moex.com/iss";
/// Timeout in seconds applied to every outbound ISS request
pub const DEFAULT_ISS_TIMEOUT: u64 = 10;
/// Path fragment selecting the main equity board (T+ shares, TQBR)
pub const STOCK_BOARD_PATH: &str = "engines/stock/markets/shares/boards/TQBR";
/// Date format used by the ISS history endpoint
pub const ISS_DATE_FORMAT: &str = "%Y-%m-%d";
/// User agent string sent with every outbound ISS request
pub const USER_AGENT: &str = "moex-gateway/0.1.0";
/// Default host the gateway binds to
pub const DEFAULT_GATEWAY_HOST: &str = "127.0.0.1";
/// Default port the gateway binds to
pub const DEFAULT_GATEWAY_PORT: u16 = 8080;
