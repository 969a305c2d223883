/*
 * Responsibility
 * - ページ handler 用の extractor をまとめて公開する
 */
mod caller;
mod params;

pub use caller::{Caller, CallerIdentity};
pub use params::RequestParameters;
