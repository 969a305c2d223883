/*!
 * Caller identity extractor
 *
 * Responsibility:
 * - middleware が解決した呼び出し元 (CallerIdentity) を handler に渡す
 * - 型定義は types に、axum 依存は core に置く
 *
 * Public API:
 * - CallerIdentity
 * - Caller
 */

mod core;
mod types;

pub use core::Caller;
pub use types::CallerIdentity;
