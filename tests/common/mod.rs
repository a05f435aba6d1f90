//! Shared fixtures: a scripted `/api/me` transport and a sample profile.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::channel::oneshot;
use serde_json::{json, Value};

use me_portal::models::{MeResponse, Profile};
use me_portal::{ApiError, MeTransport};

/// Reply for one request: either ready now or resolved later by the test
pub enum Reply<T> {
    Ready(Result<T, ApiError>),
    Deferred(oneshot::Receiver<Result<T, ApiError>>),
}

impl<T> Reply<T> {
    async fn resolve(self) -> Result<T, ApiError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Deferred(rx) => rx.await.expect("test dropped the reply sender"),
        }
    }
}

/// Transport that answers from queued replies and records every call
#[derive(Default)]
pub struct ScriptedTransport {
    gets: RefCell<VecDeque<Reply<Profile>>>,
    puts: RefCell<VecDeque<Reply<MeResponse>>>,
    get_calls: Cell<usize>,
    put_bodies: RefCell<Vec<Value>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// First GET answers with [`john_doe`]
    pub fn loaded() -> Self {
        Self::new().get_ok(john_doe())
    }

    pub fn get_ok(self, profile: Profile) -> Self {
        self.gets.borrow_mut().push_back(Reply::Ready(Ok(profile)));
        self
    }

    pub fn get_err(self, error: ApiError) -> Self {
        self.gets.borrow_mut().push_back(Reply::Ready(Err(error)));
        self
    }

    pub fn put_ok(self, response: MeResponse) -> Self {
        self.puts.borrow_mut().push_back(Reply::Ready(Ok(response)));
        self
    }

    /// PUT answered with the raw JSON body, decoded like the real client does
    pub fn put_json(self, body: Value) -> Self {
        let response = MeResponse::from_value(body).expect("fixture body must decode");
        self.put_ok(response)
    }

    /// 2xx PUT with a raw text body, read leniently like the real client
    pub fn put_text(self, body: &str) -> Self {
        self.put_ok(MeResponse::from_put_body(body))
    }

    pub fn put_err(self, error: ApiError) -> Self {
        self.puts.borrow_mut().push_back(Reply::Ready(Err(error)));
        self
    }

    pub fn get_deferred(&self) -> oneshot::Sender<Result<Profile, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.gets.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    pub fn put_deferred(&self) -> oneshot::Sender<Result<MeResponse, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.puts.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.get()
    }

    pub fn put_bodies(&self) -> Vec<Value> {
        self.put_bodies.borrow().clone()
    }
}

impl MeTransport for ScriptedTransport {
    async fn fetch_me(&self) -> Result<Profile, ApiError> {
        self.get_calls.set(self.get_calls.get() + 1);
        let reply = self.gets.borrow_mut().pop_front().expect("unexpected GET /api/me");
        reply.resolve().await
    }

    async fn put_me(&self, body: &Value) -> Result<MeResponse, ApiError> {
        self.put_bodies.borrow_mut().push(body.clone());
        let reply = self.puts.borrow_mut().pop_front().expect("unexpected PUT /api/me");
        reply.resolve().await
    }
}

/// Full profile as the backend returns it
pub fn john_doe() -> Profile {
    serde_json::from_value(json!({
        "firstName": "John", "lastName": "Doe",
        "email": "john@doe.com", "phone": "+49 151 123456",
        "address": "Street 1", "city": "Essen", "state": "NRW", "zip": "45127", "country": "DE",
        "position": "FE", "department": null,
        "bankDetail": {
            "bankName": "N26", "bankBic": "NTSBDEB1XXX", "iban": "DE44123412341234123412",
            "id": "1", "bankId": "BK1", "paymentMethod": "sepa", "payee": "John Doe"
        },
        "tax": {
            "taxId": "12345678901", "noTaxId": false, "extraJob": "no", "disability": "none",
            "information": "-", "employmentStatus": "full-time", "secondSalary": "no"
        },
        "insurance": {
            "ssn": "123456789012", "noSsn": false, "birthCountry": "Germany", "birthName": "Doe",
            "healthInsuranceType": "public", "healthInsurance": "TK",
            "desiredHealthInsuranceCompany": "TK", "privateHealthInsuranceName": "",
            "privateHealthInsuranceContribution": "", "privateNursingInsuranceContribution": "",
            "lastPrivateHealthInsurance": "", "haveChildren": "no",
            "requestFromPensionInsurance": false
        }
    }))
    .expect("fixture profile must decode")
}
