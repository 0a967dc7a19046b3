// Principle 5: Dependency Inversion
// High-level modules should not depend on low-level modules; both depend on
// an abstraction. `WelcomeMessageGood` knows only `SendMail`, so new mail
// transports plug in without touching it.

use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// ============================================================================
// Breaking the principle
// ============================================================================

pub struct Mailer;

impl Mailer {
    pub fn send_mail(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending email welcome message...")
    }
}

// Hard-wired to the concrete `Mailer`.
pub struct WelcomeMessage {
    pub mailer: Mailer,
}

impl WelcomeMessage {
    pub fn send_mail(&self, out: &mut dyn Write) -> io::Result<()> {
        self.mailer.send_mail(out)
    }
}

// ============================================================================
// Following the principle
// ============================================================================

pub trait SendMail {
    fn send_my_mail(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub struct SmtpMailer;

impl SendMail for SmtpMailer {
    fn send_my_mail(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending welcome email using SmtpMailer...")
    }
}

pub struct SlackMailer;

impl SendMail for SlackMailer {
    fn send_my_mail(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Sending welcome email using SlackMailer...")
    }
}

pub struct WelcomeMessageGood {
    mailer: Box<dyn SendMail>,
}

impl WelcomeMessageGood {
    pub fn new(mailer: Box<dyn SendMail>) -> Self {
        WelcomeMessageGood { mailer }
    }

    pub fn send_my_mail(&self, out: &mut dyn Write) -> io::Result<()> {
        debug!("sending welcome message");
        self.mailer.send_my_mail(out)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn main() -> io::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Bad example
    let msg = WelcomeMessage { mailer: Mailer };
    msg.send_mail(&mut out)?;

    // Good example
    let msg2 = WelcomeMessageGood::new(Box::new(SmtpMailer));
    msg2.send_my_mail(&mut out)?;

    let msg3 = WelcomeMessageGood::new(Box::new(SlackMailer));
    msg3.send_my_mail(&mut out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sent_by(mailer: Box<dyn SendMail>) -> String {
        let mut buf: Vec<u8> = Vec::new();
        WelcomeMessageGood::new(mailer).send_my_mail(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_smtp_and_slack() {
        assert_eq!(sent_by(Box::new(SmtpMailer)), "Sending welcome email using SmtpMailer...\n");
        assert_eq!(sent_by(Box::new(SlackMailer)), "Sending welcome email using SlackMailer...\n");
    }

    #[test]
    fn test_concrete_welcome_message() {
        let mut buf: Vec<u8> = Vec::new();
        WelcomeMessage { mailer: Mailer }.send_mail(&mut buf).unwrap();
        assert_eq!(buf, b"Sending email welcome message...\n");
    }

    struct RecordingMailer {
        calls: Rc<RefCell<usize>>,
    }

    impl SendMail for RecordingMailer {
        fn send_my_mail(&self, _out: &mut dyn Write) -> io::Result<()> {
            *self.calls.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_welcome_message_calls_injected_mailer_once() {
        let calls = Rc::new(RefCell::new(0));
        let msg = WelcomeMessageGood::new(Box::new(RecordingMailer {
            calls: Rc::clone(&calls),
        }));

        let mut buf: Vec<u8> = Vec::new();
        msg.send_my_mail(&mut buf).unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert!(buf.is_empty());
    }

    struct FailingMailer;

    impl SendMail for FailingMailer {
        fn send_my_mail(&self, _out: &mut dyn Write) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::ConnectionRefused, "mail server down"))
        }
    }

    #[test]
    fn test_mailer_error_propagates_unchanged() {
        let msg = WelcomeMessageGood::new(Box::new(FailingMailer));
        let err = msg.send_my_mail(&mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionRefused);
        assert_eq!(err.to_string(), "mail server down");
    }
}
