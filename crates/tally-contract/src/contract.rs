use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use tally_state::StateStore;
use tally_types::{Product, ProductId, RetailerId, StateKey, Transaction, TransactionKind};

use crate::args::Args;
use crate::context::TxContext;
use crate::error::{ContractError, ContractResult};
use crate::response::Response;

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

/// The operations the contract answers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create or replace a product record.
    AddInventory,
    /// Decrement stock with an availability check.
    SellFromInventory,
    /// Return the stored product bytes verbatim.
    ViewInventory,
    /// Return a retailer's latest transaction.
    TransactionHistory,
}

impl Operation {
    /// All operations, in dispatch-table order.
    pub const ALL: [Operation; 4] = [
        Operation::AddInventory,
        Operation::SellFromInventory,
        Operation::ViewInventory,
        Operation::TransactionHistory,
    ];

    /// The wire name the host dispatches on.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::AddInventory => "addInventory",
            Self::SellFromInventory => "sellFromInventory",
            Self::ViewInventory => "viewInventory",
            Self::TransactionHistory => "getTransactionHistory",
        }
    }

    /// Returns `true` if the operation writes to the store.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::AddInventory | Self::SellFromInventory)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

// ---------------------------------------------------------------------------
// InventoryContract
// ---------------------------------------------------------------------------

/// The inventory contract: a deterministic state machine over a key-value
/// world state.
///
/// Every invocation is a pure function of the verb, the arguments, the
/// host-supplied [`TxContext`], and the store contents. The contract holds
/// no caches and no cross-call state, so a fresh instance per invocation
/// and a long-lived one behave identically.
pub struct InventoryContract<S: StateStore> {
    store: S,
    operations: HashMap<&'static str, Operation>,
}

impl<S: StateStore> InventoryContract<S> {
    /// Create a contract over the given world-state store.
    pub fn new(store: S) -> Self {
        let operations = Operation::ALL.iter().map(|op| (op.verb(), *op)).collect();
        Self { store, operations }
    }

    /// The operation registered for a verb, if any.
    pub fn operation(&self, verb: &str) -> Option<Operation> {
        self.operations.get(verb).copied()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Route one invocation to its operation.
    ///
    /// Unknown verbs fail with [`ContractError::UnknownOperation`]; every
    /// other failure mode belongs to the operation itself.
    pub fn dispatch(
        &self,
        ctx: &TxContext,
        verb: &str,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        debug!(verb, args = args.len(), "dispatch");
        let operation = self
            .operation(verb)
            .ok_or_else(|| ContractError::UnknownOperation(verb.to_string()))?;

        match operation {
            Operation::AddInventory => self.add_inventory(ctx, args),
            Operation::SellFromInventory => self.sell_from_inventory(ctx, args),
            Operation::ViewInventory => self.view_inventory(args),
            Operation::TransactionHistory => self.transaction_history(args),
        }
    }

    /// Host-facing entry: dispatch and fold the result into a [`Response`].
    pub fn invoke(&self, ctx: &TxContext, verb: &str, args: &[String]) -> Response {
        Response::from(self.dispatch(ctx, verb, args))
    }

    // ---- Mutating operations ----

    /// Create or replace a product record and record an `add` transaction.
    ///
    /// Arguments, in order: retailerId, supplierId, productId, productName,
    /// brand, style, size, color, quantity. Any existing record under the
    /// same product key is overwritten whole; there is no merge and no
    /// existence check.
    pub fn add_inventory(&self, ctx: &TxContext, args: &[String]) -> ContractResult<Vec<u8>> {
        let args = Args::exactly(args, 9, "addInventory")?;

        let product = Product {
            retailer_id: args.parse(0, "retailerId")?,
            supplier_id: args.parse(1, "supplierId")?,
            product_id: args.parse(2, "productId")?,
            product_name: args.raw(3).to_string(),
            brand: args.raw(4).to_string(),
            style: args.raw(5).to_string(),
            size: args.parse(6, "size")?,
            color: args.raw(7).to_string(),
            quantity: args.parse(8, "quantity")?,
        };

        // Add attributes the transaction to the supplier argument as given,
        // while sell records the product's retailer. The asymmetry is
        // longstanding ledger behavior and readers depend on it.
        let transaction = Transaction {
            transaction_id: ctx.tx_id(),
            timestamp: ctx.timestamp(),
            kind: TransactionKind::Add,
            owner: args.raw(1).to_string(),
            product_snapshot: product.clone(),
        };

        self.commit(&product, &transaction)
    }

    /// Sell stock from an existing product and record a `sell` transaction.
    ///
    /// Arguments, in order: productId, quantity to sell. Overselling fails
    /// with [`ContractError::InsufficientInventory`] and leaves the stored
    /// record untouched.
    pub fn sell_from_inventory(
        &self,
        ctx: &TxContext,
        args: &[String],
    ) -> ContractResult<Vec<u8>> {
        let args = Args::exactly(args, 2, "sellFromInventory")?;
        let product_id: ProductId = args.parse(0, "productId")?;
        let quantity: u32 = args.parse(1, "quantity")?;

        let mut product = self.read_product(product_id)?;
        if !product.can_fulfill(quantity) {
            return Err(ContractError::InsufficientInventory {
                requested: quantity,
                available: product.quantity,
            });
        }
        product.quantity -= quantity;

        // See `add_inventory` for the owner asymmetry.
        let transaction = Transaction {
            transaction_id: ctx.tx_id(),
            timestamp: ctx.timestamp(),
            kind: TransactionKind::Sell,
            owner: product.retailer_id.to_string(),
            product_snapshot: product.clone(),
        };

        self.commit(&product, &transaction)
    }

    // ---- Read operations ----

    /// Return the stored product record bytes exactly as last written.
    pub fn view_inventory(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        let args = Args::exactly(args, 1, "viewInventory")?;
        let id: ProductId = args.parse(0, "productId")?;
        self.read_raw(StateKey::product(id))
    }

    /// Return the most recent transaction recorded for a retailer.
    ///
    /// Transactions are keyed per retailer, so history is depth one: each
    /// mutation replaces the previous record for that retailer.
    pub fn transaction_history(&self, args: &[String]) -> ContractResult<Vec<u8>> {
        let args = Args::exactly(args, 1, "getTransactionHistory")?;
        let id: RetailerId = args.parse(0, "retailerId")?;
        self.read_raw(StateKey::transaction(id))
    }

    // ---- Store access ----

    /// Read and decode the product under `product/<id>`.
    ///
    /// Absence and store read failures both surface as
    /// [`ContractError::NotFound`]; bytes that are present but undecodable
    /// are corruption, reported as [`ContractError::SerializationFailed`].
    fn read_product(&self, id: ProductId) -> ContractResult<Product> {
        let key = StateKey::product(id);
        let bytes = self
            .store
            .get(&key)
            .map_err(|_| ContractError::NotFound {
                key: key.to_string(),
            })?
            .ok_or_else(|| ContractError::NotFound {
                key: key.to_string(),
            })?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ContractError::SerializationFailed(e.to_string()))
    }

    /// Read the raw bytes under a key; absence and read failure are both
    /// reported as [`ContractError::NotFound`].
    fn read_raw(&self, key: StateKey) -> ContractResult<Vec<u8>> {
        self.store
            .get(&key)
            .map_err(|_| ContractError::NotFound {
                key: key.to_string(),
            })?
            .ok_or_else(|| ContractError::NotFound {
                key: key.to_string(),
            })
    }

    /// Serialize both records and write them, transaction first.
    ///
    /// The two writes are not atomic: if the product write fails, the
    /// transaction stays committed and no rollback is attempted. The
    /// returned bytes are the serialized product.
    fn commit(&self, product: &Product, transaction: &Transaction) -> ContractResult<Vec<u8>> {
        let product_bytes = serde_json::to_vec(product)
            .map_err(|e| ContractError::SerializationFailed(e.to_string()))?;
        let transaction_bytes = serde_json::to_vec(transaction)
            .map_err(|e| ContractError::SerializationFailed(e.to_string()))?;

        let tx_key = StateKey::transaction(product.retailer_id);
        self.store
            .put(&tx_key, &transaction_bytes)
            .map_err(|e| ContractError::StoreWriteFailed {
                key: tx_key.to_string(),
                reason: e.to_string(),
            })?;

        let product_key = StateKey::product(product.product_id);
        self.store
            .put(&product_key, &product_bytes)
            .map_err(|e| ContractError::StoreWriteFailed {
                key: product_key.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            product = %product_key,
            transaction = %tx_key,
            kind = %transaction.kind,
            "inventory committed"
        );
        Ok(product_bytes)
    }
}

impl<S: StateStore> fmt::Debug for InventoryContract<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryContract")
            .field("operations", &self.operations.len())
            .finish()
    }
}
