use std::error::Error as _;
use std::io::{self, Read};
use std::time::Duration;

use ureq::{Agent, AgentBuilder, Error::Status, Error::Transport};

use super::{FileDownloader, Response};

/// Blocking HTTP(S) transport. The timeout bounds the whole request, body included.
pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mut body = Vec::new();

                if let Err(e) = response.into_reader().read_to_end(&mut body) {
                    return if is_timeout(&e) {
                        Response::timed_out()
                    } else {
                        Response::invalid_body(e.to_string())
                    };
                }

                Response::ok(body)
            }

            Err(Status(code, _)) => Response::status(code),

            Err(Transport(transport)) => {
                let timed_out = transport
                    .source()
                    .and_then(|source| source.downcast_ref::<io::Error>())
                    .is_some_and(is_timeout);

                if timed_out {
                    Response::timed_out()
                } else {
                    Response::network_error(transport.to_string())
                }
            }
        }
    }
}

impl UReqFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Self {
        let agent = AgentBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .build();

        UReqFetcher { agent }
    }
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    )
}
