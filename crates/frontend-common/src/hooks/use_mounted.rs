//! Mount tracking for async work started by a component

use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Whether the owning component is still mounted
#[derive(Clone, Debug)]
pub struct Mounted(Rc<Cell<bool>>);

impl Mounted {
    pub fn get(&self) -> bool {
        self.0.get()
    }
}

/// Results of a request that outlives its component must be discarded;
/// check `Mounted::get` before applying them.
#[hook]
pub fn use_mounted() -> Mounted {
    let flag: Rc<Cell<bool>> = (*use_memo((), |_| Rc::new(Cell::new(true)))).clone();

    {
        let flag = Rc::clone(&flag);
        use_effect_with((), move |_| {
            flag.set(true);
            move || flag.set(false)
        });
    }

    Mounted(flag)
}
