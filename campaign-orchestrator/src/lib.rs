//! Campaign Orchestrator - HTTP surface for the LLM admission gate
//!
//! # Architecture
//!
//! ```text
//! campaign-orchestrator/
//! └── presentation/     # HTTP layer
//!     ├── controllers   # Request handlers
//!     ├── middleware/   # LLM rate limiting
//!     ├── models        # Response DTOs
//!     └── routes.rs     # Route definitions
//! ```
//!
//! # API Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/api/v1/llm/admission` | POST | Take one token; 429 when the bucket is empty |
//! | `/api/v1/llm/rate-limit` | GET | Current bucket state (spends nothing) |
//! | `/health` | GET | Health check |

pub mod presentation;
