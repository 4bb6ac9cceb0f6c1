// Gateway transports - the only place a push batch touches the network
// Each transport posts a pre-encoded JSON body and hands back the raw reply

pub mod http;

use std::future::Future;
use std::pin::Pin;

use url::Url;

use crate::components::NotificationResult;

pub use http::HttpTransport;

/// Boxed future returned by transports
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = NotificationResult<String>> + Send + 'a>>;

/// Transport trait for abstraction over the HTTP exchange
///
/// Implementations POST `body` to `url` and return the response body as
/// text, whatever the HTTP status. An `Err` means no usable reply arrived.
pub trait PushTransport: Send + Sync {
    fn post<'a>(&'a self, url: &'a Url, body: String) -> TransportFuture<'a>;
}

impl<T: PushTransport + ?Sized> PushTransport for std::sync::Arc<T> {
    fn post<'a>(&'a self, url: &'a Url, body: String) -> TransportFuture<'a> {
        (**self).post(url, body)
    }
}

impl<T: PushTransport + ?Sized> PushTransport for Box<T> {
    fn post<'a>(&'a self, url: &'a Url, body: String) -> TransportFuture<'a> {
        (**self).post(url, body)
    }
}

/// Adapter turning a synchronous closure into a transport
///
/// Handy for caller-supplied senders and for test doubles.
pub struct FnTransport<F> {
    send: F,
}

impl<F> FnTransport<F>
where
    F: Fn(&Url, &str) -> NotificationResult<String> + Send + Sync,
{
    pub fn new(send: F) -> Self {
        Self { send }
    }
}

impl<F> PushTransport for FnTransport<F>
where
    F: Fn(&Url, &str) -> NotificationResult<String> + Send + Sync,
{
    fn post<'a>(&'a self, url: &'a Url, body: String) -> TransportFuture<'a> {
        let reply = (self.send)(url, &body);
        Box::pin(async move { reply })
    }
}

impl<F> std::fmt::Debug for FnTransport<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnTransport").finish_non_exhaustive()
    }
}
