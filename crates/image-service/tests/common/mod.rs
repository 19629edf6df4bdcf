//! Scripted transport for provider tests.

#![allow(dead_code)]

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use image_service::{ImageTransport, TransportError, TransportResponse};

/// What the mock answers with.
pub enum Reply {
    /// Response with the given content type and body
    Body(Option<&'static str>, Vec<u8>),
    /// Image content type whose body fails to read
    BrokenBody(&'static str),
    /// Network-class failure with this message
    Network(&'static str),
    /// Generic failure with this message
    Other(&'static str),
}

/// Transport that records requested URLs and replays a fixed reply.
pub struct MockTransport {
    reply: Reply,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn image(content_type: &'static str, body: Vec<u8>) -> Self {
        Self::new(Reply::Body(Some(content_type), body))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl ImageTransport for MockTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        match &self.reply {
            Reply::Body(content_type, body) => Ok(TransportResponse::new(
                content_type.map(str::to_string),
                io::Cursor::new(body.clone()),
            )),
            Reply::BrokenBody(content_type) => Ok(TransportResponse::new(
                Some(content_type.to_string()),
                FailingReader,
            )),
            Reply::Network(msg) => Err(TransportError::Network(Box::new(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                *msg,
            )))),
            Reply::Other(msg) => Err(TransportError::Other(Box::new(io::Error::new(
                io::ErrorKind::InvalidInput,
                *msg,
            )))),
        }
    }
}

/// Body that fails on the first read, as a dropped connection would.
pub struct FailingReader;

impl io::Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection reset mid-body"))
    }
}
