/// StoreSettings - user preferences that shape the dependency store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreSettings {
    /// Hide dependencies that are up to date instead of only flagging the outdated ones
    pub filter_outdated_dependencies: bool,
    /// Run the outdated check as soon as the store is initialised
    pub check_outdated_on_startup: bool,
}

impl StoreSettings {
    pub fn new(filter_outdated_dependencies: bool, check_outdated_on_startup: bool) -> Self {
        Self {
            filter_outdated_dependencies,
            check_outdated_on_startup,
        }
    }
}
