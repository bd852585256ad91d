pub mod config;
pub mod domain {
    pub mod payment;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payments;
    }
    pub mod router;
}
pub mod repo;
pub mod service {
    pub mod payment_service;
}

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}
