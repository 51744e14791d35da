#[cfg(test)]
mod core {
    mod config;
}

#[cfg(test)]
mod contacts {
    mod api_client;
    mod store;
}


fn main() {}
