pub mod export;
pub mod inventory;
pub mod show;
#[cfg(test)]
mod tests;
