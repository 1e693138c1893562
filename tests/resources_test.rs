//! Request/response round trips for each resource against a mock server.

mod common;

use chrono::{TimeZone, Utc};
use serde_json::json;
use stripe_sdk::*;
use wiremock::matchers::{basic_auth, body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{setup, API_KEY};

fn charge_json() -> serde_json::Value {
    json!({
        "id": "ch_1",
        "object": "charge",
        "amount": 1000,
        "currency": "usd",
        "paid": true,
        "refunded": false,
        "livemode": false,
        "created": 1356000000,
        "fee": 59,
        "card": {"object": "card", "last4": "4242", "type": "Visa", "exp_month": 3, "exp_year": 2030}
    })
}

#[tokio::test]
async fn test_create_charge_with_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(basic_auth(API_KEY, ""))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("amount=1000&currency=usd&card=tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": "ch_1", "amount": 1000, "currency": "usd", "paid": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let charge = client
        .charges()
        .create(CreateChargeRequest::new(1000, "usd", Token::from_id("tok_123")))
        .await
        .unwrap();

    assert!(charge.paid);
    assert_eq!(charge.amount, 1000);
    assert_eq!(charge.id, "ch_1");
}

#[tokio::test]
async fn test_charge_read_after_write() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge_json()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/charges/ch_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge_json()))
        .mount(&server)
        .await;

    let card = Card::new("4242424242424242", 3, 2030).cvc("123");
    let created = client
        .charges()
        .create(CreateChargeRequest::new(1000, "usd", card).description("order 7"))
        .await
        .unwrap();
    let fetched = client.charges().get(&created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.card.unwrap().last4, "4242");
    assert_eq!(fetched.created.map(|c| c.timestamp()), Some(1_356_000_000));
}

#[tokio::test]
async fn test_charge_customer_with_card_on_file() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/charges"))
        .and(body_string("amount=500&currency=usd&customer=cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"id": "ch_2", "amount": 500, "currency": "usd", "customer": "cus_1", "paid": true}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let customer = Customer {
        id: "cus_1".to_string(),
        active_card: Some(PartialCard::default()),
        ..Default::default()
    };
    let charge = client
        .charges()
        .create(CreateChargeRequest::new(500, "usd", &customer))
        .await
        .unwrap();
    assert_eq!(charge.customer.as_deref(), Some("cus_1"));
}

#[tokio::test]
async fn test_refund_full_and_partial() {
    let (server, client) = setup().await;

    let mut refunded = charge_json();
    refunded["refunded"] = json!(true);

    Mock::given(method("POST"))
        .and(path("/v1/charges/ch_1/refund"))
        .and(body_string("amount=400"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge_json()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/charges/ch_1/refund"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200).set_body_json(refunded))
        .expect(1)
        .mount(&server)
        .await;

    let partial = client.charges().refund("ch_1", Some(400)).await.unwrap();
    assert!(!partial.refunded);
    let full = client.charges().refund("ch_1", None).await.unwrap();
    assert!(full.refunded);
}

#[tokio::test]
async fn test_list_charges_omits_default_paging() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/charges"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "count": 42,
            "data": [charge_json(), charge_json()]
        })))
        .mount(&server)
        .await;

    let page = client
        .charges()
        .list(
            ChargeListRequest::new()
                .options(ListOptions::new().count(-1).offset(-1))
                .customer("cus_1"),
        )
        .await
        .unwrap();
    assert_eq!(page.count, 42);
    assert_eq!(page.len(), 2);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), Some("customer=cus_1"));
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let (server, client) = setup().await;

    let customer = json!({
        "id": "cus_1",
        "object": "customer",
        "email": "oso@example.com",
        "description": "Oso de Peluche",
        "account_balance": 0,
        "active_card": {"last4": "4242", "type": "Visa", "exp_month": 3, "exp_year": 2030},
        "created": 1356000000
    });

    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(body_string(
            "card=tok_1&email=oso%40example.com&description=Oso+de+Peluche",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1"))
        .and(body_string("description=VIP"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut updated = customer.clone();
            updated["description"] = json!("VIP");
            updated
        }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "cus_1", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .customers()
        .create(
            CustomerRequest::new()
                .card(Card::from_token("tok_1"))
                .email("oso@example.com")
                .description("Oso de Peluche"),
        )
        .await
        .unwrap();
    assert_eq!(created.id, "cus_1");
    assert!(created.active_card.is_some());

    let updated = client
        .customers()
        .update("cus_1", CustomerRequest::new().description("VIP"))
        .await
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("VIP"));

    assert!(client.customers().delete("cus_1").await.unwrap());
}

#[tokio::test]
async fn test_list_customers_with_paging() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("count", "2"))
        .and(query_param("offset", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 7,
            "data": [{"id": "cus_5"}, {"id": "cus_6"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client
        .customers()
        .list(ListOptions::new().count(2).offset(4))
        .await
        .unwrap();
    let ids: Vec<_> = page.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["cus_5", "cus_6"]);
}

#[tokio::test]
async fn test_create_and_get_token() {
    let (server, client) = setup().await;

    let token = json!({
        "id": "tok_1",
        "object": "token",
        "used": false,
        "livemode": false,
        "created": 1356000000,
        "card": {"last4": "4242", "type": "Visa", "exp_month": 3, "exp_year": 2030, "cvc_check": "pass"}
    });

    Mock::given(method("POST"))
        .and(path("/v1/tokens"))
        .and(body_string(
            "card%5Bnumber%5D=4242424242424242&card%5Bexp_month%5D=3&card%5Bexp_year%5D=2030&card%5Bcvc%5D=123",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(token.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/tokens/tok_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token))
        .expect(1)
        .mount(&server)
        .await;

    let card = Card::new("4242424242424242", 3, 2030).cvc("123");
    let created = client
        .tokens()
        .create(CreateTokenRequest::new(card))
        .await
        .unwrap();
    let fetched = client.tokens().get("tok_1").await.unwrap();

    assert_eq!(created, fetched);
    let partial = fetched.card.unwrap();
    assert_eq!(partial.exp_month, 3);
    assert_eq!(partial.exp_year, 2030);
    assert!("4242424242424242".ends_with(&partial.last4));
}

#[tokio::test]
async fn test_plan_crud() {
    let (server, client) = setup().await;

    let plan = json!({
        "id": "gold",
        "object": "plan",
        "name": "Gold",
        "amount": 500,
        "currency": "usd",
        "interval": "month",
        "livemode": false
    });

    Mock::given(method("POST"))
        .and(path("/v1/plans"))
        .and(body_string("id=gold&name=Gold&amount=500&currency=usd&interval=month"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plan.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/plans/gold"))
        .respond_with(ResponseTemplate::new(200).set_body_json(plan.clone()))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/plans/gold"))
        .and(body_string("name=Platinum"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut renamed = plan.clone();
            renamed["name"] = json!("Platinum");
            renamed
        }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/plans/gold"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "gold", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = Plan::new("gold", "Gold", 500, "usd", Interval::Month);
    let created = client.plans().create(&request).await.unwrap();
    assert_eq!(
        (&created.id, &created.name, created.amount, &created.currency, created.interval),
        (&request.id, &request.name, request.amount, &request.currency, request.interval)
    );
    assert_eq!(client.plans().get("gold").await.unwrap(), created);

    let renamed = client.plans().update("gold", "Platinum").await.unwrap();
    assert_eq!(renamed.name, "Platinum");

    assert!(client.plans().delete("gold").await.unwrap());
}

#[tokio::test]
async fn test_coupon_create_and_list() {
    let (server, client) = setup().await;

    let coupon = json!({
        "id": "HALF",
        "object": "coupon",
        "percent_off": 50,
        "duration": "repeating",
        "duration_in_months": 3,
        "times_redeemed": 0
    });

    Mock::given(method("POST"))
        .and(path("/v1/coupons"))
        .and(body_string(
            "percent_off=50&duration=repeating&duration_in_months=3&id=HALF",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(coupon.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/coupons"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"count": 1, "data": [coupon]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .coupons()
        .create(
            &Coupon::new(50, CouponDuration::Repeating)
                .duration_in_months(3)
                .id("HALF"),
        )
        .await
        .unwrap();
    assert_eq!(created.duration, CouponDuration::Repeating);

    let all = client.coupons().list(ListOptions::new()).await.unwrap();
    assert_eq!(all.data, vec![created]);
}

#[tokio::test]
async fn test_subscribe_and_cancel() {
    let (server, client) = setup().await;

    let subscription = json!({
        "object": "subscription",
        "status": "active",
        "customer": "cus_1",
        "cancel_at_period_end": false,
        "current_period_start": 1356000000,
        "current_period_end": 1358678400,
        "plan": {"id": "gold", "name": "Gold", "amount": 500, "currency": "usd", "interval": "month"}
    });

    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1/subscription"))
        .and(body_string("plan=gold&prorate=false&trial_end=1893456000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscription.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1/subscription"))
        .and(query_param("at_period_end", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut canceling = subscription.clone();
            canceling["cancel_at_period_end"] = json!(true);
            canceling
        }))
        .expect(1)
        .mount(&server)
        .await;

    let trial_end = Utc.timestamp_opt(1_893_456_000, 0).unwrap();
    let sub = client
        .subscriptions()
        .update(
            "cus_1",
            UpdateSubscriptionRequest::new("gold")
                .prorate(false)
                .trial_end(trial_end),
        )
        .await
        .unwrap();
    assert_eq!(sub.status, SubscriptionStatus::Active);
    assert_eq!(sub.plan.unwrap().id, "gold");

    let canceled = client.subscriptions().cancel("cus_1", true).await.unwrap();
    assert!(canceled.cancel_at_period_end);
}

#[tokio::test]
async fn test_invoices_and_items() {
    let (server, client) = setup().await;

    let item = json!({
        "id": "ii_1",
        "object": "invoiceitem",
        "amount": 1500,
        "currency": "usd",
        "customer": "cus_1",
        "description": "setup fee",
        "date": 1356000000
    });

    Mock::given(method("POST"))
        .and(path("/v1/invoiceitems"))
        .and(body_string(
            "customer=cus_1&amount=1500&currency=usd&invoice=in_1&description=setup+fee",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(item.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/invoiceitems/ii_1"))
        .and(body_string("amount=2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json({
            let mut updated = item.clone();
            updated["amount"] = json!(2000);
            updated
        }))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/invoiceitems/ii_1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "ii_1", "deleted": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/invoices/upcoming"))
        .and(query_param("customer", "cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "invoice",
            "customer": "cus_1",
            "subtotal": 1500,
            "total": 1500,
            "lines": {"invoiceitems": [item], "subscriptions": [], "prorations": []}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/invoices"))
        .and(query_param("customer", "cus_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "data": [{"id": "in_1", "object": "invoice", "subtotal": 500, "total": 500, "paid": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .invoice_items()
        .create(
            CreateInvoiceItemRequest::new("cus_1", 1500, "usd")
                .invoice("in_1")
                .description("setup fee"),
        )
        .await
        .unwrap();
    assert_eq!(created.id, "ii_1");

    let updated = client
        .invoice_items()
        .update("ii_1", UpdateInvoiceItemRequest::new().amount(2000))
        .await
        .unwrap();
    assert_eq!(updated.amount, 2000);

    let upcoming = client.invoices().upcoming("cus_1").await.unwrap();
    assert_eq!(upcoming.id, None);
    assert_eq!(upcoming.lines.invoiceitems.len(), 1);

    let invoices = client
        .invoices()
        .list(InvoiceListRequest::new().customer("cus_1"))
        .await
        .unwrap();
    assert!(invoices.data[0].paid);

    assert!(client.invoice_items().delete("ii_1").await.unwrap());
}

#[tokio::test]
async fn test_list_events_by_type_and_date() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/events"))
        .and(query_param("type", "customer.created"))
        .and(query_param("created[gte]", "1356000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "data": [{
                "id": "evt_1",
                "object": "event",
                "type": "customer.created",
                "created": 1356000100,
                "livemode": false,
                "pending_webhooks": 0,
                "data": {"object": {"id": "cus_1", "object": "customer", "email": "oso@example.com"}}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let since = Utc.timestamp_opt(1_356_000_000, 0).unwrap();
    let events = client
        .events()
        .list(
            EventQuery::new()
                .kind("customer.created")
                .created(Comparator::Gte, since),
        )
        .await
        .unwrap();

    let event = events.into_iter().next().unwrap();
    assert_eq!(event.data.object_type(), Some("customer"));
    let customer: Customer = event.data.object_as().unwrap();
    assert_eq!(customer.email.as_deref(), Some("oso@example.com"));
}

#[tokio::test]
async fn test_customer_read_after_write() {
    let (server, client) = setup().await;

    let customer = json!({
        "id": "cus_2",
        "object": "customer",
        "email": "panda@example.com",
        "account_balance": 250,
        "active_card": {"last4": "4242", "type": "Visa", "exp_month": 3, "exp_year": 2030},
        "created": 1356000000
    });

    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(body_string("email=panda%40example.com&account_balance=250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(customer))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .customers()
        .create(
            CustomerRequest::new()
                .email("panda@example.com")
                .account_balance(250),
        )
        .await
        .unwrap();
    let fetched = client.customers().get(&created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.account_balance, 250);
    assert_eq!(fetched.active_card.unwrap().last4, "4242");
}

#[tokio::test]
async fn test_coupon_read_after_write() {
    let (server, client) = setup().await;

    let coupon = json!({
        "id": "ONCE25",
        "object": "coupon",
        "percent_off": 25,
        "duration": "once",
        "times_redeemed": 0,
        "livemode": false
    });

    Mock::given(method("POST"))
        .and(path("/v1/coupons"))
        .and(body_string("percent_off=25&duration=once&id=ONCE25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(coupon.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/coupons/ONCE25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(coupon))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .coupons()
        .create(&Coupon::new(25, CouponDuration::Once).id("ONCE25"))
        .await
        .unwrap();
    let fetched = client.coupons().get(&created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.percent_off, 25);
    assert_eq!(fetched.duration, CouponDuration::Once);
}

#[tokio::test]
async fn test_invoice_item_read_after_write_and_list() {
    let (server, client) = setup().await;

    let item = json!({
        "id": "ii_2",
        "object": "invoiceitem",
        "amount": 700,
        "currency": "usd",
        "customer": "cus_1",
        "date": 1356000000
    });

    Mock::given(method("POST"))
        .and(path("/v1/invoiceitems"))
        .and(body_string("customer=cus_1&amount=700&currency=usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems/ii_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(item.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/invoiceitems"))
        .and(query_param("customer", "cus_1"))
        .and(query_param("count", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"count": 1, "data": [item]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .invoice_items()
        .create(CreateInvoiceItemRequest::new("cus_1", 700, "usd"))
        .await
        .unwrap();
    let fetched = client.invoice_items().get(&created.id).await.unwrap();
    assert_eq!(created, fetched);
    assert_eq!(fetched.date.map(|d| d.timestamp()), Some(1_356_000_000));

    let items = client
        .invoice_items()
        .list(
            InvoiceListRequest::new()
                .customer("cus_1")
                .options(ListOptions::new().count(5)),
        )
        .await
        .unwrap();
    assert_eq!(items.count, 1);
    assert_eq!(items.data, vec![fetched]);
}

#[tokio::test]
async fn test_get_invoice() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/invoices/in_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "in_1",
            "object": "invoice",
            "customer": "cus_1",
            "subtotal": 500,
            "total": 500,
            "paid": true,
            "closed": true,
            "date": 1356000000,
            "lines": {
                "invoiceitems": [],
                "subscriptions": [{"amount": 500, "currency": "usd",
                                   "plan": {"id": "gold", "name": "Gold", "amount": 500,
                                            "currency": "usd", "interval": "month"}}],
                "prorations": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let invoice = client.invoices().get("in_1").await.unwrap();
    assert_eq!(invoice.id.as_deref(), Some("in_1"));
    assert!(invoice.paid && invoice.closed);
    assert_eq!(invoice.issued_at().map(|d| d.timestamp()), Some(1_356_000_000));
    let line = &invoice.lines.subscriptions[0];
    assert_eq!(line.plan.as_ref().map(|p| p.id.as_str()), Some("gold"));
}

#[tokio::test]
async fn test_get_event() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/events/evt_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "evt_9",
            "object": "event",
            "type": "charge.refunded",
            "created": 1356000200,
            "livemode": false,
            "pending_webhooks": 2,
            "data": {"object": charge_json()}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let event = client.events().get("evt_9").await.unwrap();
    assert_eq!(event.kind, "charge.refunded");
    assert_eq!(event.pending_webhooks, 2);
    assert_eq!(event.created.map(|c| c.timestamp()), Some(1_356_000_200));
    let charge: Charge = event.data.object_as().unwrap();
    assert_eq!(charge.id, "ch_1");
}

#[tokio::test]
async fn test_refund_zero_is_sent() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/v1/charges/ch_1/refund"))
        .and(body_string("amount=0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(charge_json()))
        .expect(1)
        .mount(&server)
        .await;

    let charge = client.charges().refund("ch_1", Some(0)).await.unwrap();
    assert_eq!(charge.id, "ch_1");
    assert!(matches!(
        client.charges().refund("ch_1", Some(-5)).await,
        Err(StripeError::InvalidArgument(_))
    ));
}
