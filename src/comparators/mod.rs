mod interface;

pub use interface::InterfaceComparator;
