use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-based contact storage: one JSON file per contact, named by id.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn contact_path(&self, id: &str) -> PathBuf {
        self.root.join(id)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    /// Read and parse a single contact file.
    pub fn retrieve_one(&self, path: &Path) -> Result<Contact> {
        let content = fs::read_to_string(path)?;
        let contact = serde_json::from_str(&content)?;
        Ok(contact)
    }
}

impl ContactStore for FileStore {
    fn save(&mut self, contact: &Contact) -> Result<()> {
        // The directory may have gone away since construction
        self.ensure_root()?;
        let content = serde_json::to_string_pretty(contact)?;
        fs::write(self.contact_path(contact.id()), content)?;
        Ok(())
    }

    fn retrieve_all(&self) -> Result<Vec<Contact>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut contacts = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() || is_hidden(&path) {
                continue;
            }
            match self.retrieve_one(&path) {
                Ok(contact) => contacts.push(contact),
                Err(err) => {
                    warn!("skipping unreadable contact file {}: {}", path.display(), err)
                }
            }
        }
        Ok(contacts)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        match fs::remove_file(self.contact_path(id)) {
            Ok(()) => Ok(()),
            // Already gone counts as deleted
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn delete_all(&mut self) -> Result<()> {
        // Clear contents only; the directory itself stays in place
        if !self.root.exists() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
