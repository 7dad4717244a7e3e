//! Prescriber session.
//!
//! Holds the logged-in user whose identity stamps every generated
//! document. There is no account backend; the test profile stands in for
//! one until real authentication exists.

use crate::models::{DoctorInfo, User};

/// The active prescriber for the duration of a run.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Identity block used when filling document headers.
    pub fn doctor_info(&self) -> &DoctorInfo {
        &self.user.doctor_info
    }

    /// Built-in test prescriber profile.
    pub fn test_profile() -> Self {
        Self::new(User {
            id: "user-test-01".into(),
            email: "teste@receituario.med.br".into(),
            doctor_info: DoctorInfo {
                name: "Dr(a). Usuário Teste".into(),
                crm: "CRM/SP 123456".into(),
                clinic_name: "UNIDADE UBS TESTE".into(),
                clinic_address: "Rua de Teste, 123".into(),
                clinic_phone: "11 4636-0000".into(),
                clinic_city_state_zip: "CEP 08560-000 Teste-SP".into(),
                emitter_name_line1: "SECRETARIA MUNICIPAL DA SAÚDE".into(),
                emitter_name_line2: "DE POÁ".into(),
                emitter_address: "Rua Barão de Japurana, 43 - Tel. - 4636-2110".into(),
                emitter_city_state: "Poá – São Paulo".into(),
                emitter_cnpj: "CNPJ 55.021.455/0001-85".into(),
            },
        })
    }
}
