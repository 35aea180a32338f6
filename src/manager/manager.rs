use std::cell::{
    RefCell,
    RefMut
};
use std::collections::HashMap;

use super::managererror::ManagerError;
use crate::kernel::kernel::Kernel;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        let elem_opt = map.get(name);
        elem_opt.map_or(
            Err(ManagerError::map_elem_not_found(name)),
            |elem| Ok(elem.clone())
        )
    }

    fn insert(&self, name: String, value: V) -> Option<V> {
        self.map().insert(name, value)
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new() -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()) }
    }
}

impl <V> Default for Manager<V> where
    V: Clone {
    fn default() -> Self {
        Manager::new()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }
}


pub type KernelManager = Manager<Kernel>;

impl Manager<Kernel> {
    /// Registry holding every built-in kernel under its exported name.
    pub fn with_builtin_kernels() -> KernelManager {
        let manager = Manager::new();
        for kernel in Kernel::ALL {
            manager.insert(kernel.name().to_owned(), kernel);
        }
        manager
    }
}
