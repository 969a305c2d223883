/*
 * Responsibility
 * - middleware の公開インターフェース
 * - pub fn apply(...) をそれぞれ持つ
 */
pub mod http;
pub mod identity;
pub mod security_headers;
