//! Endpoint URLs
//!
//! URL builders for the PokéAPI resources the catalog reads.

pub fn pokemon_list(base: &str, limit: u32, offset: u32) -> String {
    format!("{}/pokemon?limit={}&offset={}", base, limit, offset)
}

pub fn pokemon(base: &str, id: &str) -> String {
    format!("{}/pokemon/{}", base, id)
}

pub fn pokemon_species(base: &str, id: &str) -> String {
    format!("{}/pokemon-species/{}", base, id)
}

pub fn types(base: &str) -> String {
    format!("{}/type", base)
}
