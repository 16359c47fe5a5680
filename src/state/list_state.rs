//! Estado de una página de listado
//!
//! Cada página guarda `items`, `loading` y `error`. Un fetch correcto
//! reemplaza la lista completa respetando el orden de la respuesta.

/// Qué hacer con la lista cuando falla un fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Conserva lo ya cargado; el error solo bloquea si no hay nada que mostrar
    KeepPrevious,
    /// Cualquier error reemplaza la vista por un panel de error
    Blocking,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    policy: ErrorPolicy,
}

/// Lo que la vista debe pintar
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Populated {
        items: &'a [T],
        warning: Option<&'a str>,
    },
}

impl<T> ListState<T> {
    /// Estado inicial: cargando, como al montar la página
    pub fn new(policy: ErrorPolicy) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            policy,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    pub fn begin_fetch(&mut self) {
        self.error = None;
        self.loading = match self.policy {
            // Un refresh en segundo plano no debe dejar la página en blanco
            ErrorPolicy::KeepPrevious => self.items.is_empty(),
            ErrorPolicy::Blocking => true,
        };
    }

    pub fn finish_ok(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
        self.loading = false;
    }

    pub fn finish_err(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
        if self.policy == ErrorPolicy::Blocking {
            self.items.clear();
        }
    }

    /// Quita los elementos que cumplan el predicado; devuelve cuántos
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    pub fn find<F>(&self, predicate: F) -> Option<&T>
    where
        F: Fn(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn view(&self) -> ListView<'_, T> {
        if self.loading {
            return ListView::Loading;
        }

        match (&self.error, self.policy) {
            (Some(error), ErrorPolicy::Blocking) => return ListView::Error(error),
            (Some(error), ErrorPolicy::KeepPrevious) if self.items.is_empty() => {
                return ListView::Error(error)
            }
            _ => {}
        }

        if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Populated {
                items: &self.items,
                warning: self.error.as_deref(),
            }
        }
    }
}
