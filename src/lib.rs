//! # workout-builder
//!
//! Leptos + WASM front-end shell for the workout builder application.
//! Client-side rendered: a router over two placeholder pages (Home,
//! Workouts) and a static navigation bar.
//!
//! This crate contains the root application component, pages, and the
//! shared navigation/card components. There is no backend, no network
//! layer, and no persisted state.

pub mod app;
pub mod components;
pub mod pages;
