use crate::areas::git::Git;
use crate::artifacts::checkout::request::CheckoutRequest;
use std::cell::{RefCell, RefMut};

/// Coordinator for materializing one pinned source checkout.
///
/// Owns the destination-scoped git runner and the output writer; the actual
/// step sequence lives in `commands::checkout_repo`.
pub struct Checkout {
    request: CheckoutRequest,
    git: Git,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Checkout {
    pub fn new(request: CheckoutRequest, writer: Box<dyn std::io::Write>) -> Self {
        let git = Git::new(request.destination());

        Checkout {
            request,
            git,
            writer: RefCell::new(writer),
        }
    }

    pub fn request(&self) -> &CheckoutRequest {
        &self.request
    }

    pub(crate) fn git(&self) -> &Git {
        &self.git
    }

    pub(crate) fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
