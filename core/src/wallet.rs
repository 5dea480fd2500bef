use serde::{Deserialize, Serialize};

use crate::{Credits, GameError, Result};

/// Balance holder the engine debits stakes from and credits payouts to.
pub trait Wallet {
    fn balance(&self) -> Credits;

    /// Fails with [`GameError::InsufficientFunds`] without touching the balance when `amount` exceeds it.
    fn debit(&mut self, amount: Credits) -> Result<()>;

    fn credit(&mut self, amount: Credits);
}

impl<W: Wallet + ?Sized> Wallet for &mut W {
    fn balance(&self) -> Credits {
        (**self).balance()
    }

    fn debit(&mut self, amount: Credits) -> Result<()> {
        (**self).debit(amount)
    }

    fn credit(&mut self, amount: Credits) {
        (**self).credit(amount)
    }
}

/// Process-local wallet.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryWallet {
    balance: Credits,
}

impl MemoryWallet {
    pub const fn new(balance: Credits) -> Self {
        Self { balance }
    }
}

impl Wallet for MemoryWallet {
    fn balance(&self) -> Credits {
        self.balance
    }

    fn debit(&mut self, amount: Credits) -> Result<()> {
        if amount > self.balance {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        log::trace!("debited {}, balance {}", amount, self.balance);
        Ok(())
    }

    fn credit(&mut self, amount: Credits) {
        self.balance = self.balance.checked_add(amount).unwrap_or_else(|| {
            log::warn!("Balance saturated crediting {} onto {}", amount, self.balance);
            Credits::MAX
        });
        log::trace!("credited {}, balance {}", amount, self.balance);
    }
}
