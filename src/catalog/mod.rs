/*!
 * Catalog data model.
 *
 * - `message`: the translatable unit, its lifecycle state and locations
 * - `store`: the ordered catalog with identity lookups and sorted insertion
 */

pub use self::message::{Message, MessageKey, MessageType, Reference};
pub use self::store::{Catalog, LocationsType};

pub mod message;
pub mod store;
