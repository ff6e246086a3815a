#[cfg(target_arch = "wasm32")]
fn main() {
    velvet_shaker::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    println!("This is a browser app. Build and serve it with `trunk serve`.");
}
