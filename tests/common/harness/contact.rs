//! Builder for `[[contacts]]` entries in test config files.

/// A contact to write into the test config.
///
/// Defaults: protocol `jabber`, account `me@example.com`, handle
/// `<nick>@example.com`, connected.
#[derive(Debug, Clone)]
pub struct TestContact {
    nick: String,
    protocol: String,
    account: String,
    handle: String,
    connected: bool,
}

impl TestContact {
    pub fn new(nick: &str) -> Self {
        Self {
            nick: nick.to_string(),
            protocol: "jabber".to_string(),
            account: "me@example.com".to_string(),
            handle: format!("{}@example.com", nick),
            connected: true,
        }
    }

    pub fn protocol(mut self, protocol: &str) -> Self {
        self.protocol = protocol.to_string();
        self
    }

    pub fn account(mut self, account: &str) -> Self {
        self.account = account.to_string();
        self
    }

    pub fn handle(mut self, handle: &str) -> Self {
        self.handle = handle.to_string();
        self
    }

    /// Marks the contact as having no established account.
    pub fn offline(mut self) -> Self {
        self.connected = false;
        self
    }

    /// Renders the contact as a TOML `[[contacts]]` table.
    pub fn to_toml(&self) -> String {
        format!(
            "[[contacts]]\nnick = {:?}\nprotocol = {:?}\naccount = {:?}\nhandle = {:?}\nconnected = {}\n",
            self.nick, self.protocol, self.account, self.handle, self.connected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_derive_handle_from_nick() {
        let toml = TestContact::new("alice").to_toml();
        assert!(toml.contains("handle = \"alice@example.com\""));
    }

    #[test]
    fn to_toml_renders_table() {
        let toml = TestContact::new("bob").offline().to_toml();
        assert!(toml.starts_with("[[contacts]]\n"));
        assert!(toml.contains("nick = \"bob\""));
        assert!(toml.contains("connected = false"));
    }
}
