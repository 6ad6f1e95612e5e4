//! Fakes shared by the integration tests
#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap, rc::Rc, sync::Once};

use lettre::message::Mailbox;
use mandrill_delivery::{
    ApiConnector, Attachment, Mail, MandrillError, MessagesApi, TemplateContent,
};
use serde_json::{json, Value};

static TRACING: Once = Once::new();

/// Routes `tracing` output through the test harness
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// A composed mail with just enough fields for the delivery method
#[derive(Debug, Clone, Default)]
pub struct TestMail {
    pub sender: Option<Mailbox>,
    pub to: Vec<Mailbox>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub attachments: Vec<Attachment>,
    pub options: HashMap<String, Value>,
}

impl TestMail {
    pub fn new() -> Self {
        Self {
            sender: Some("Acme <noreply@acme.test>".parse().unwrap()),
            to: vec!["Jane Doe <jane@example.com>".parse().unwrap()],
            subject: Some("Welcome".to_string()),
            text: Some("Hello Jane".to_string()),
            ..Default::default()
        }
    }

    pub fn with_template(mut self, name: &str, content: Value) -> Self {
        self.options.insert("template".to_string(), json!(name));
        self.options.insert("template_content".to_string(), content);
        self
    }
}

impl Mail for TestMail {
    fn sender(&self) -> Option<Mailbox> {
        self.sender.clone()
    }

    fn to(&self) -> Vec<Mailbox> {
        self.to.clone()
    }

    fn cc(&self) -> Vec<Mailbox> {
        Vec::new()
    }

    fn bcc(&self) -> Vec<Mailbox> {
        Vec::new()
    }

    fn reply_to(&self) -> Option<Mailbox> {
        None
    }

    fn subject(&self) -> Option<String> {
        self.subject.clone()
    }

    fn text_body(&self) -> Option<String> {
        self.text.clone()
    }

    fn html_body(&self) -> Option<String> {
        None
    }

    fn attachments(&self) -> Vec<Attachment> {
        self.attachments.clone()
    }

    fn headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn option(&self, name: &str) -> Option<Value> {
        self.options.get(name).cloned()
    }
}

/// A call made against [`RecordingApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Send {
        message: String,
        async_send: bool,
    },
    SendTemplate {
        template_name: String,
        template_content: Vec<TemplateContent>,
        message: String,
        async_send: bool,
    },
}

/// Everything the fakes observed
#[derive(Debug, Default)]
pub struct Recorded {
    pub api_keys: Vec<String>,
    pub calls: Vec<Call>,
}

/// A connector recording the keys it was asked to connect with
#[derive(Debug, Clone, Default)]
pub struct RecordingConnector {
    pub recorded: Rc<RefCell<Recorded>>,
    pub rejected_key: Option<String>,
}

impl ApiConnector for RecordingConnector {
    type Api = RecordingApi;

    fn connect(&self, api_key: &str) -> Result<RecordingApi, MandrillError> {
        self.recorded.borrow_mut().api_keys.push(api_key.to_string());

        if self.rejected_key.as_deref() == Some(api_key) {
            return Err(MandrillError::InvalidKey("Invalid API key".to_string()));
        }

        Ok(RecordingApi {
            recorded: Rc::clone(&self.recorded),
        })
    }
}

/// An API answering with canned responses and recording every call
#[derive(Debug)]
pub struct RecordingApi {
    recorded: Rc<RefCell<Recorded>>,
}

impl MessagesApi for RecordingApi {
    fn send(&self, message: &str, async_send: bool) -> Result<Value, MandrillError> {
        self.recorded.borrow_mut().calls.push(Call::Send {
            message: message.to_string(),
            async_send,
        });

        Ok(json!({ "send_response_key": "send response value" }))
    }

    fn send_template(
        &self,
        template_name: &str,
        template_content: &[TemplateContent],
        message: &str,
        async_send: bool,
    ) -> Result<Value, MandrillError> {
        self.recorded.borrow_mut().calls.push(Call::SendTemplate {
            template_name: template_name.to_string(),
            template_content: template_content.to_vec(),
            message: message.to_string(),
            async_send,
        });

        Ok(json!({ "send_tmp_response_key": "send tmp response value" }))
    }
}
