//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements   | Connects to                         |
//! |---------------|--------------|-------------------------------------|
//! | `hardware`    | SensorPort   | thermal array source                |
//! |               | ActuatorPort | servo + fan PWM drivers             |
//! |               | TriggerPort  | mode button GPIO                    |
//! | `log_sink`    | EventSink    | `log` facade / serial console       |
//! | `config_file` | ConfigPort   | JSON or postcard file on disk       |
//! | `sim`         | embedded-hal | in-memory PWM, scripted button      |
//! | `delay`       | DelayNs      | `std::thread::sleep`                |

pub mod config_file;
pub mod delay;
pub mod hardware;
pub mod log_sink;
pub mod sim;
