// src/api/mod.rs - Backend API client, interceptors and error normalization

pub mod client;
pub mod envelope;
pub mod error;
pub mod interceptor;
pub mod sequence;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use interceptor::{
    AuthInterceptor, ChannelUnauthorizedHandler, CorrelationIdInterceptor, IgnoreUnauthorized,
    LoggingInterceptor, Outcome, RequestInterceptor, ResponseInterceptor, UnauthorizedHandler,
    UnauthorizedInterceptor, AUTHORIZATION_HEADER, CORRELATION_HEADER,
};
pub use sequence::{RequestSequence, Ticket};
