// LinkVault services
// Services provide the pieces panels lean on: the API client, tag codec, settings and logging.

pub mod bookmark_client;
pub mod logging;
pub mod settings_engine;
pub mod tag_codec;
