use cs_core::VerificationRequest;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Body of `POST /api/v1/enviar-sms`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EnviarSmsRequest {
    #[validate(custom = "validate_not_blank")]
    pub celular: String,
    #[validate(custom = "validate_not_blank")]
    pub codigo: String,
    #[validate(custom = "validate_not_blank")]
    pub sucursal: String,
}

impl EnviarSmsRequest {
    /// Fields are passed through untouched; the gateway judges the number
    pub fn to_verification_request(&self) -> VerificationRequest {
        VerificationRequest::new(&self.celular, &self.codigo, &self.sucursal)
    }
}

/// Body of `POST /api/v1/verificar`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerificarRequest {
    #[validate(custom = "validate_not_blank")]
    pub dni: String,
    #[validate(custom = "validate_not_blank")]
    pub celular: String,
    #[validate(custom = "validate_not_blank")]
    pub sucursal: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if cs_shared::validation::not_blank(value) {
        Ok(())
    } else {
        let mut error = ValidationError::new("required");
        error.message = Some("El campo es obligatorio".into());
        Err(error)
    }
}

/// Flatten validator errors into one line, fields in alphabetical order
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "valor inválido".to_string());
            format!("{}: {}", field, message)
        })
        .collect();
    fields.sort();
    fields.join("; ")
}
