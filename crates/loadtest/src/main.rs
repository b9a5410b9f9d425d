use goose::prelude::*;

// The root redirect route is deliberately not exercised here: the load test
// client follows redirects, which would send traffic to the real provider.

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/healthz").await?;
    Ok(())
}

async fn auth_callback(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user
        .get("/auth/callback?code=loadtest-code&state=0")
        .await?;
    Ok(())
}

async fn auth_callback_empty(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/auth/callback").await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(
            scenario!("HealthCheck").register_transaction(transaction!(health_check)),
        )
        .register_scenario(
            scenario!("AuthCallback")
                .register_transaction(transaction!(auth_callback))
                .register_transaction(transaction!(auth_callback_empty)),
        )
        .execute()
        .await?;

    Ok(())
}
