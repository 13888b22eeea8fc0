mod export;
mod reference;
mod snapshot;
