pub mod controllers;
pub mod dto;

#[cfg(test)]
mod tests;
