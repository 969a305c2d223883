/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - renderer / properties / identity の 3 collaborator を起動時に注入する
 * - Clone 前提で持つ (内部は Arc)
 * - collaborator は未配線 (None) もありうる。必須のものは取り出し時に AppError にする
 */
use std::sync::Arc;

use crate::error::AppError;
use crate::services::{
    identity::IdentityProvider, properties::ApplicationProperties, render::TemplateRenderer,
};

#[derive(Clone, Default)]
pub struct AppState {
    pub renderer: Option<Arc<dyn TemplateRenderer>>,
    pub properties: Option<Arc<dyn ApplicationProperties>>,
    pub identity: Option<Arc<dyn IdentityProvider>>,
}

impl AppState {
    pub fn new(
        renderer: Option<Arc<dyn TemplateRenderer>>,
        properties: Option<Arc<dyn ApplicationProperties>>,
        identity: Option<Arc<dyn IdentityProvider>>,
    ) -> Self {
        Self {
            renderer,
            properties,
            identity,
        }
    }

    pub fn renderer(&self) -> Result<&Arc<dyn TemplateRenderer>, AppError> {
        self.renderer
            .as_ref()
            .ok_or_else(|| AppError::unavailable("TemplateRenderer"))
    }

    pub fn properties(&self) -> Result<&Arc<dyn ApplicationProperties>, AppError> {
        self.properties
            .as_ref()
            .ok_or_else(|| AppError::unavailable("ApplicationProperties"))
    }
}
