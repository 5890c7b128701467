pub mod columns;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod view;
