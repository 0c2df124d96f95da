//! REST API backend for managing tournaments and their players.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, DTO validation and conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations over the entity models
//! - **Model Layer** (`model/`) - Wire DTOs, domain models, and operation parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Structured error-body assembly
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Logging setup and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to the appropriate controller
//! 2. **Controller** validates the payload, converts the DTO to params, calls a service
//! 3. **Service** applies business rules and orchestrates repository operations
//! 4. **Data** queries the database and returns entity models
//! 5. **Service** converts entities to domain models and returns them
//! 6. **Controller** converts the domain model to a DTO and returns the HTTP response
//!
//! Failures raised anywhere in that flow surface as `AppError` and are rendered as a
//! structured `{ timestamp, messages, path }` body with the matching status code.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
