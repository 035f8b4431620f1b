//! Feed scrapers.
//!
//! One source today: the Google News RSS search endpoint, fetched once per
//! date window. A scraper exposes a `fetch_window` operation returning the
//! window's records in feed order; windows are fetched strictly in sequence
//! by the driver, so a scraper holds no cross-window state.

pub mod google_news;
