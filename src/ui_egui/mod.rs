mod app;

pub use app::CountdownApp;
