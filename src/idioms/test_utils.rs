//! Test doubles shared by the assertion tests
//!
//! Stub instance sources that hand out pre-built specimens, and an
//! ill-behaved type whose equality depends on call order.
