use poem::{
    listener::{Acceptor, Listener, TcpListener},
    Endpoint, Server,
};
use std::sync::Mutex;

/// Start `app` on an ephemeral local port and return its base url.
pub async fn serve<E>(app: E) -> String
where
    E: Endpoint + 'static,
{
    let acceptor = TcpListener::bind("127.0.0.1:0")
        .into_acceptor()
        .await
        .unwrap();
    let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();

    tokio::spawn(Server::new_with_acceptor(acceptor).run(app));

    format!("http://{}", addr)
}

/// Requests seen by a mock endpoint
#[derive(Default)]
pub struct Hits(Mutex<Vec<String>>);

impl Hits {
    /// Remember one request and return how many have been seen so far.
    pub fn record(&self, value: String) -> usize {
        let mut values = self.0.lock().unwrap();
        values.push(value);
        values.len()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn values(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}
