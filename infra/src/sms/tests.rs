//! Unit tests for transport creation

use std::io;
use std::sync::{Arc, Mutex};

use cs_core::{GatewayQuery, GatewayTransport};

use crate::config::SmsConfig;
use crate::sms::{create_transport, SimulatedTransport};
use crate::InfrastructureError;

fn config(provider: &str) -> SmsConfig {
    SmsConfig {
        provider: provider.to_string(),
        ..SmsConfig::default()
    }
}

#[test]
fn test_create_sms_masivos_transport() {
    let transport = create_transport(&config("smsmasivos")).unwrap();
    assert_eq!(transport.provider_name(), "SMS Masivos");
}

#[test]
fn test_create_simulated_transport() {
    let transport = create_transport(&config("mock")).unwrap();
    assert_eq!(transport.provider_name(), "Simulated");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let result = create_transport(&config("twilio"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[tokio::test]
async fn test_simulated_transport_answers_test_code() {
    let transport = SimulatedTransport::new();
    let query = GatewayQuery {
        api_key: "k".to_string(),
        to: "3511234567".to_string(),
        text: "hola".to_string(),
    };

    assert_eq!(transport.send(&query).await.unwrap(), "1");
    assert_eq!(transport.send(&query).await.unwrap(), "1");
    assert_eq!(transport.message_count(), 2);
}

/// Writer collecting formatted log output in memory
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_simulated_transport_keeps_code_out_of_logs() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let transport = SimulatedTransport::new();
    let query = GatewayQuery {
        api_key: "k".to_string(),
        to: "3511234567".to_string(),
        text: "CheckSMS - Tu codigo de verificacion es: 907315. Sucursal: Centro".to_string(),
    };
    transport.send(&query).await.unwrap();

    let output = logs.contents();
    assert!(output.contains("351****4567"));
    assert!(output.contains("message_length=65"));
    assert!(!output.contains("907315"));
    assert!(!output.contains("3511234567"));
}
