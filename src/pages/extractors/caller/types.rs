/*
 * Responsibility
 * - handler から見える「呼び出し元」の型
 * - identity middleware が request extensions に格納し、handler はこの型だけを受け取る
 */

/// The authenticated caller as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub display_name: String,
}

impl CallerIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}
