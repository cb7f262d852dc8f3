//! SeaORM entities for the monitoring tables.
//!
//! Rows are only ever inserted by the mock data generator; the HTTP layer reads them.

pub mod alert;
pub mod metric;
pub mod server;

pub mod prelude {
    pub use super::server::Entity as Server;
    pub use super::server::Model as ServerModel;
    pub use super::server::ActiveModel as ServerActiveModel;
    pub use super::server::Column as ServerColumn;

    pub use super::alert::Entity as Alert;
    pub use super::alert::Model as AlertModel;
    pub use super::alert::ActiveModel as AlertActiveModel;
    pub use super::alert::Column as AlertColumn;

    pub use super::metric::Entity as Metric;
    pub use super::metric::Model as MetricModel;
    pub use super::metric::ActiveModel as MetricActiveModel;
    pub use super::metric::Column as MetricColumn;
}
